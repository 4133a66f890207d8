pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

pub const USER_PROFILE_QUERY: &str = r#"
query UserProfile($username: String!) {
  user(login: $username) {
    login
    name
    bio
    location
    company
    websiteUrl
    avatarUrl
    createdAt
    updatedAt
    gists { totalCount }
    followers { totalCount }
    following { totalCount }
    repositories(ownerAffiliations: OWNER) { totalCount }
    contributionsCollection {
      totalCommitContributions
      totalIssueContributions
      totalPullRequestContributions
      totalPullRequestReviewContributions
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}
"#;

pub const REPOSITORIES_QUERY: &str = r#"
query UserRepositories($username: String!, $first: Int!, $after: String) {
  user(login: $username) {
    repositories(
      first: $first,
      after: $after,
      ownerAffiliations: OWNER,
      orderBy: { field: UPDATED_AT, direction: DESC }
    ) {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        name
        isPrivate
        isFork
        stargazerCount
        forkCount
        primaryLanguage { name }
        issues { totalCount }
        pullRequests { totalCount }
        defaultBranchRef {
          target {
            ... on Commit {
              history { totalCount }
            }
          }
        }
      }
    }
  }
}
"#;
